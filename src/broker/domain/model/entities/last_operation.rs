use crate::broker::domain::model::{
    entities::cluster::Cluster,
    enums::{
        backend_error::BackendError, cluster_state::ClusterState,
        last_operation_state::LastOperationState, operation_kind::OperationKind,
    },
};

/// Progress of a long-running cluster operation as reported to the platform.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LastOperation {
    state: LastOperationState,
    description: String,
}

impl LastOperation {
    /// Derives the outcome of `operation` from what Atlas currently reports for
    /// the cluster. Nothing is remembered between polls.
    pub fn derive(operation: OperationKind, observation: Result<&Cluster, &BackendError>) -> Self {
        match operation {
            OperationKind::Provision | OperationKind::Update => match observation {
                Ok(cluster) => match &cluster.state_name {
                    ClusterState::Idle => Self::new(
                        LastOperationState::Succeeded,
                        format!("cluster {} is ready", cluster.name),
                    ),
                    ClusterState::Creating | ClusterState::Updating | ClusterState::Repairing => {
                        Self::new(
                            LastOperationState::InProgress,
                            format!("cluster {} is {}", cluster.name, cluster.state_name),
                        )
                    }
                    other => Self::new(
                        LastOperationState::Failed,
                        format!("cluster {} is in unexpected state {other}", cluster.name),
                    ),
                },
                Err(error) => Self::new(LastOperationState::Failed, error.to_string()),
            },
            OperationKind::Deprovision => match observation {
                Ok(cluster) => Self::new(
                    LastOperationState::InProgress,
                    format!("cluster {} is {}", cluster.name, cluster.state_name),
                ),
                Err(BackendError::ClusterNotFound(name)) => Self::new(
                    LastOperationState::Succeeded,
                    format!("cluster {name} has been deleted"),
                ),
                Err(error) => Self::new(LastOperationState::Failed, error.to_string()),
            },
        }
    }

    fn new(state: LastOperationState, description: String) -> Self {
        Self { state, description }
    }

    pub fn state(&self) -> LastOperationState {
        self.state
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
