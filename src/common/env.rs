use std::env;
use std::error::Error;
use std::str::FromStr;

pub trait FromEnv: Sized {
    fn from_env(env_var: &str) -> anyhow::Result<Self>;

    /// Like [`FromEnv::from_env`], but an unset variable is `None` instead of an error.
    fn from_env_opt(env_var: &str) -> anyhow::Result<Option<Self>>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env(env_var: &str) -> anyhow::Result<Self> {
        let value = env::var(env_var)?;
        Ok(T::from_str(&value)?)
    }

    fn from_env_opt(env_var: &str) -> anyhow::Result<Option<Self>> {
        match env::var(env_var) {
            Ok(value) => Ok(Some(T::from_str(&value)?)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
