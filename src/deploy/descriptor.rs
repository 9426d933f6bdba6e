use anyhow::{Context, bail, ensure};
use bitflags::bitflags;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_AUTH_METHOD: &str = "publickey";

/// Deployment descriptor as written on disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployDescriptor {
    pub application: String,
    pub stage: String,
    pub branch: String,
    #[serde(default)]
    pub deploy_to: Option<String>,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
    #[serde(default)]
    pub environment: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub user: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub ssh_options: SshOptionsConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SshOptionsConfig {
    /// Falls back to the server's user.
    pub user: Option<String>,
    #[serde(default)]
    pub forward_agent: bool,
    pub auth_methods: Option<Vec<String>>,
}

bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct Roles: u8 {
        const WEB = 1 << 0;
        const APP = 1 << 1;
        const DB = 1 << 2;
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        f.write_str(&names.join(" "))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthMethod {
    PublicKey,
    Password,
    KeyboardInteractive,
    HostBased,
}

impl FromStr for AuthMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publickey" => Ok(AuthMethod::PublicKey),
            "password" => Ok(AuthMethod::Password),
            "keyboard-interactive" => Ok(AuthMethod::KeyboardInteractive),
            "hostbased" => Ok(AuthMethod::HostBased),
            other => bail!("unknown ssh auth method {other:?}"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SshOptions {
    pub user: String,
    pub forward_agent: bool,
    pub auth_methods: Vec<AuthMethod>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Server {
    pub host: String,
    pub user: String,
    pub roles: Roles,
    pub ssh: SshOptions,
}

/// A validated descriptor with defaults filled in and paths expanded.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub application: String,
    pub stage: String,
    pub branch: String,
    pub deploy_to: String,
    pub shared_path: String,
    pub servers: Vec<Server>,
    pub environment: BTreeMap<String, String>,
}

impl DeployDescriptor {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading deployment descriptor {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("parsing deployment descriptor {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn resolve(self) -> anyhow::Result<DeployPlan> {
        ensure!(!self.application.trim().is_empty(), "application must be set");
        ensure!(!self.stage.trim().is_empty(), "stage must be set");
        ensure!(!self.branch.trim().is_empty(), "branch must be set");
        ensure!(!self.servers.is_empty(), "at least one server is required");

        let deploy_to = self
            .deploy_to
            .unwrap_or_else(|| format!("/var/www/{}", self.application));
        let shared_path = format!("{}/shared", deploy_to.trim_end_matches('/'));

        let servers = self
            .servers
            .into_iter()
            .map(ServerConfig::resolve)
            .collect::<anyhow::Result<Vec<_>>>()?;

        let environment = self
            .environment
            .into_iter()
            .map(|(key, value)| {
                let value = value
                    .replace("{shared_path}", &shared_path)
                    .replace("{deploy_to}", &deploy_to)
                    .replace("{application}", &self.application);
                (key, value)
            })
            .collect();

        Ok(DeployPlan {
            application: self.application,
            stage: self.stage,
            branch: self.branch,
            deploy_to,
            shared_path,
            servers,
            environment,
        })
    }
}

impl ServerConfig {
    fn resolve(self) -> anyhow::Result<Server> {
        let host = self.host.trim().to_owned();
        ensure!(!host.is_empty(), "server host must be set");
        ensure!(!self.user.trim().is_empty(), "server {host}: user must be set");

        let mut roles = Roles::empty();
        for role in &self.roles {
            match Roles::from_name(&role.to_ascii_uppercase()) {
                Some(flag) => roles |= flag,
                None => bail!("server {host}: unknown role {role:?}"),
            }
        }
        ensure!(!roles.is_empty(), "server {host}: at least one role is required");

        let auth_methods = match self.ssh_options.auth_methods {
            Some(methods) => methods,
            None => vec![DEFAULT_AUTH_METHOD.to_owned()],
        };
        ensure!(
            !auth_methods.is_empty(),
            "server {host}: at least one ssh auth method is required"
        );
        let auth_methods = auth_methods
            .iter()
            .map(|method| AuthMethod::from_str(method))
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("server {host}"))?;

        let ssh = SshOptions {
            user: self.ssh_options.user.unwrap_or_else(|| self.user.clone()),
            forward_agent: self.ssh_options.forward_agent,
            auth_methods,
        };
        Ok(Server {
            host,
            user: self.user,
            roles,
            ssh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTION: &str = include_str!("../../deploy/production.toml");

    fn minimal(server: &str) -> String {
        format!(
            "application = \"inbox\"\nstage = \"staging\"\nbranch = \"main\"\n\n[[servers]]\n{server}"
        )
    }

    #[test]
    fn resolves_production_descriptor() {
        let plan = DeployDescriptor::from_toml(PRODUCTION)
            .unwrap()
            .resolve()
            .unwrap();

        assert_eq!(plan.stage, "production");
        assert_eq!(plan.branch, "master");
        assert_eq!(plan.deploy_to, "/var/www/inbox-service");
        assert_eq!(plan.shared_path, "/var/www/inbox-service/shared");

        let server = &plan.servers[0];
        assert_eq!(server.host, "54.255.206.185");
        assert_eq!(server.user, "ubuntu");
        assert_eq!(server.roles, Roles::WEB | Roles::APP | Roles::DB);
        assert_eq!(server.roles.to_string(), "web app db");
        assert_eq!(server.ssh.user, "ubuntu");
        assert!(server.ssh.forward_agent);
        assert_eq!(
            server.ssh.auth_methods,
            vec![AuthMethod::PublicKey, AuthMethod::Password]
        );

        assert_eq!(plan.environment["app_env"], "production");
        assert_eq!(
            plan.environment["server_config_file"],
            "/var/www/inbox-service/shared/config/server.toml"
        );
    }

    #[test]
    fn ssh_options_default_from_server() {
        let raw = minimal("host = \"app.example.com\"\nuser = \"deploy\"\nroles = [\"app\"]\n");
        let plan = DeployDescriptor::from_toml(&raw).unwrap().resolve().unwrap();
        let ssh = &plan.servers[0].ssh;
        assert_eq!(ssh.user, "deploy");
        assert!(!ssh.forward_agent);
        assert_eq!(ssh.auth_methods, vec![AuthMethod::PublicKey]);
    }

    #[test]
    fn explicit_deploy_to_drives_shared_path() {
        let raw = minimal("host = \"h\"\nuser = \"u\"\nroles = [\"db\"]\n")
            .replace("branch = \"main\"", "branch = \"main\"\ndeploy_to = \"/srv/inbox/\"");
        let plan = DeployDescriptor::from_toml(&raw).unwrap().resolve().unwrap();
        assert_eq!(plan.shared_path, "/srv/inbox/shared");
    }

    #[test]
    fn rejects_unknown_roles() {
        let raw = minimal("host = \"h\"\nuser = \"u\"\nroles = [\"web\", \"cache\"]\n");
        let err = DeployDescriptor::from_toml(&raw).unwrap().resolve().unwrap_err();
        assert!(err.to_string().contains("unknown role \"cache\""));
    }

    #[test]
    fn rejects_servers_without_roles() {
        let raw = minimal("host = \"h\"\nuser = \"u\"\n");
        assert!(DeployDescriptor::from_toml(&raw).unwrap().resolve().is_err());
    }

    #[test]
    fn rejects_empty_or_unknown_auth_methods() {
        let empty = minimal(
            "host = \"h\"\nuser = \"u\"\nroles = [\"web\"]\n[servers.ssh_options]\nauth_methods = []\n",
        );
        assert!(DeployDescriptor::from_toml(&empty).unwrap().resolve().is_err());

        let unknown = minimal(
            "host = \"h\"\nuser = \"u\"\nroles = [\"web\"]\n[servers.ssh_options]\nauth_methods = [\"gssapi\"]\n",
        );
        assert!(DeployDescriptor::from_toml(&unknown).unwrap().resolve().is_err());
    }

    #[test]
    fn rejects_descriptors_without_servers() {
        let raw = "application = \"inbox\"\nstage = \"production\"\nbranch = \"master\"\n";
        let err = DeployDescriptor::from_toml(raw).unwrap().resolve().unwrap_err();
        assert!(err.to_string().contains("at least one server"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = minimal("host = \"h\"\nuser = \"u\"\nroles = [\"web\"]\nport = 22\n");
        assert!(DeployDescriptor::from_toml(&raw).is_err());
    }
}
