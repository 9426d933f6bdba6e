pub mod descriptor;

use crate::settings::AppSettings;
use descriptor::DeployDescriptor;
use tracing::info;

/// Loads and validates the deployment descriptor, logging the resolved plan.
pub fn check(settings: &AppSettings) -> anyhow::Result<()> {
    let path = &settings.deploy_config_path;
    let plan = DeployDescriptor::load(path)?.resolve()?;
    info!(
        path = %path.display(),
        application = %plan.application,
        stage = %plan.stage,
        branch = %plan.branch,
        deploy_to = %plan.deploy_to,
        "Deployment descriptor is valid"
    );
    for server in &plan.servers {
        info!(
            host = %server.host,
            user = %server.user,
            roles = %server.roles,
            ssh_user = %server.ssh.user,
            forward_agent = server.ssh.forward_agent,
            auth_methods = ?server.ssh.auth_methods,
            "Server"
        );
    }
    for (key, value) in &plan.environment {
        info!(key = %key, value = %value, "Environment");
    }
    Ok(())
}
