use crate::common::paths;
use crate::entities::conversations::Participant as ParticipantEntity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: i64,
    pub username: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

/// A person decorated with the link to their profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonWithUrl {
    #[serde(flatten)]
    pub person: Person,
    pub display_name: String,
    pub url: String,
}

impl Person {
    pub fn with_url(self) -> PersonWithUrl {
        let url = paths::person_path(&self.username);
        let display_name = self.display_name();
        PersonWithUrl {
            person: self,
            display_name,
            url,
        }
    }

    /// Given name with the family name initial, or the username when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.given_name, &self.family_name) {
            (Some(given), Some(family)) => match family.chars().next() {
                Some(initial) => format!("{given} {initial}"),
                None => given.clone(),
            },
            (Some(given), None) => given.clone(),
            _ => self.username.clone(),
        }
    }
}

impl From<&ParticipantEntity> for Person {
    fn from(value: &ParticipantEntity) -> Self {
        Self {
            id: value.person_id,
            username: value.username.clone(),
            given_name: value.given_name.clone(),
            family_name: value.family_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Person;

    fn person(given: Option<&str>, family: Option<&str>) -> Person {
        Person {
            id: 1,
            username: "jdoe".to_owned(),
            given_name: given.map(str::to_owned),
            family_name: family.map(str::to_owned),
        }
    }

    #[test]
    fn url_is_derived_from_username() {
        let decorated = person(None, None).with_url();
        assert_eq!(decorated.url, "/jdoe");
        assert_eq!(decorated.display_name, "jdoe");
        assert_eq!(decorated.person.username, "jdoe");
    }

    #[test]
    fn display_name_prefers_names() {
        assert_eq!(person(Some("John"), Some("Doe")).display_name(), "John D");
        assert_eq!(person(Some("John"), None).display_name(), "John");
        assert_eq!(person(None, Some("Doe")).display_name(), "jdoe");
    }
}
