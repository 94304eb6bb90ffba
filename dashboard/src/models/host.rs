//! Host machine models

pub use openapi_client::models::HostMachine as RemoteHostMachine;

/// One entry of the host machine selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOption {
    /// Submitted as the host machine id
    pub value: String,
    pub label: String,
}

impl From<&RemoteHostMachine> for HostOption {
    fn from(host: &RemoteHostMachine) -> Self {
        let label = if host.ip.is_empty() {
            host.id.clone()
        } else {
            format!("{} ({})", host.id, host.ip)
        };
        Self {
            value: host.id.clone(),
            label,
        }
    }
}

/// Build the host selector options in backend order
pub fn host_options(hosts: &[RemoteHostMachine]) -> Vec<HostOption> {
    hosts.iter().map(HostOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_options() {
        let hosts = vec![
            RemoteHostMachine {
                id: "node-01".to_string(),
                ip: "192.168.1.50".to_string(),
                status: "online".to_string(),
            },
            RemoteHostMachine {
                id: "node-02".to_string(),
                ..Default::default()
            },
        ];

        let options = host_options(&hosts);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "node-01");
        assert_eq!(options[0].label, "node-01 (192.168.1.50)");
        assert_eq!(options[1].label, "node-02");
    }
}
