use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Community {
    pub id: i64,
    pub ident: String,
    pub default_locale: String,
}
