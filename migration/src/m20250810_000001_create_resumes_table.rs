use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Resumes::PublicId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Resumes::FileName).string().not_null())
                    .col(ColumnDef::new(Resumes::CandidateName).string().not_null())
                    .col(ColumnDef::new(Resumes::CandidateTitle).string().not_null())
                    .col(ColumnDef::new(Resumes::Parsed).json().not_null())
                    .col(
                        ColumnDef::new(Resumes::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Resumes {
    Table,
    Id,
    PublicId,
    FileName,
    CandidateName,
    CandidateTitle,
    Parsed,
    UploadedAt,
}
