use crate::common::i18n::Locale;
use crate::entities::communities::Community as CommunityEntity;

#[derive(Debug, Clone)]
pub struct Community {
    pub community_id: i64,
    pub ident: String,
    pub locale: Locale,
}

impl From<CommunityEntity> for Community {
    fn from(value: CommunityEntity) -> Self {
        Self {
            community_id: value.id,
            ident: value.ident,
            locale: Locale::from_tag(&value.default_locale).unwrap_or_default(),
        }
    }
}
