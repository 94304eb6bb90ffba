//! Deployment models

use std::collections::BTreeMap;

use openapi_client::models::{CreateContainerRequest, HostMachine, PortBinding};

/// Image repository the desktop variant is resolved against
pub const WEBTOP_IMAGE_REPO: &str = "lscr.io/linuxserver/webtop";

/// Shared memory size given to desktop containers
pub const WEBTOP_SHM_SIZE: &str = "1gb";

/// A host/container port pair
pub type PortMapping = PortBinding;

/// The deployment flavor chosen by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerVariant {
    /// Any image given by reference
    Plain { image: String },

    /// Preset desktop-in-browser image selected by profile
    Desktop { profile: String },
}

impl ContainerVariant {
    /// Container type as the backend names it
    pub fn kind(&self) -> &'static str {
        match self {
            ContainerVariant::Plain { .. } => "normal",
            ContainerVariant::Desktop { .. } => "webtop",
        }
    }

    /// The image reference actually sent to the backend
    pub fn resolved_image(&self) -> String {
        match self {
            ContainerVariant::Plain { image } => image.clone(),
            ContainerVariant::Desktop { profile } => format!("{}:{}", WEBTOP_IMAGE_REPO, profile),
        }
    }

    pub fn desktop_profile(&self) -> Option<&str> {
        match self {
            ContainerVariant::Plain { .. } => None,
            ContainerVariant::Desktop { profile } => Some(profile.as_str()),
        }
    }

    pub fn shared_memory_size(&self) -> Option<&'static str> {
        match self {
            ContainerVariant::Plain { .. } => None,
            ContainerVariant::Desktop { .. } => Some(WEBTOP_SHM_SIZE),
        }
    }
}

/// A container deployment assembled from the launch form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// Container name
    pub name: String,

    /// Plain image or desktop profile
    pub variant: ContainerVariant,

    /// Target host; resolved server-side
    pub host_machine_id: String,

    /// Restart policy, passed through verbatim
    pub restart_policy: String,

    /// Port mappings in form order
    pub ports: Vec<PortMapping>,

    /// Environment variables
    pub environment_variables: BTreeMap<String, String>,

    /// Volume mounts, host path to container path
    pub volume_mounts: BTreeMap<String, String>,
}

impl DeploymentRequest {
    pub fn resolved_image(&self) -> String {
        self.variant.resolved_image()
    }

    pub fn desktop_profile(&self) -> Option<&str> {
        self.variant.desktop_profile()
    }

    pub fn shared_memory_size(&self) -> Option<&'static str> {
        self.variant.shared_memory_size()
    }

    /// Body of the create call
    pub fn to_wire(&self) -> CreateContainerRequest {
        CreateContainerRequest {
            name: self.name.clone(),
            container_type: self.variant.kind().to_string(),
            container: self.resolved_image(),
            desktop_env: self.desktop_profile().map(str::to_string),
            hostmachine: HostMachine {
                id: self.host_machine_id.clone(),
                ip: String::new(),
                status: String::new(),
            },
            restartpolicy: self.restart_policy.clone(),
            ports: self.ports.clone(),
            environmentvariables: self.environment_variables.clone(),
            volumemounts: self.volume_mounts.clone(),
            shmsize: self.shared_memory_size().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(variant: ContainerVariant) -> DeploymentRequest {
        DeploymentRequest {
            name: "webtop".to_string(),
            variant,
            host_machine_id: "node-01".to_string(),
            restart_policy: "unless-stopped".to_string(),
            ports: vec![PortMapping {
                external: 3000,
                internal: 3000,
            }],
            environment_variables: BTreeMap::from([("TZ".to_string(), "Etc/UTC".to_string())]),
            volume_mounts: BTreeMap::new(),
        }
    }

    #[test]
    fn test_desktop_wire_shape() {
        let req = request(ContainerVariant::Desktop {
            profile: "ubuntu-xfce".to_string(),
        });
        let value = serde_json::to_value(req.to_wire()).unwrap();

        assert_eq!(value["type"], "webtop");
        assert_eq!(value["container"], "lscr.io/linuxserver/webtop:ubuntu-xfce");
        assert_eq!(value["desktopEnv"], "ubuntu-xfce");
        assert_eq!(value["shmsize"], "1gb");
        assert_eq!(value["hostmachine"]["id"], "node-01");
        assert_eq!(value["ports"][0]["external"], 3000);
        assert_eq!(value["environmentvariables"]["TZ"], "Etc/UTC");
    }

    #[test]
    fn test_plain_variant_has_no_desktop_fields() {
        let req = request(ContainerVariant::Plain {
            image: "nginx:1.27".to_string(),
        });

        assert_eq!(req.resolved_image(), "nginx:1.27");
        assert_eq!(req.desktop_profile(), None);
        assert_eq!(req.shared_memory_size(), None);

        let wire = req.to_wire();
        assert_eq!(wire.container_type, "normal");
        assert!(wire.desktop_env.is_none());
        assert!(wire.shmsize.is_none());
    }
}
