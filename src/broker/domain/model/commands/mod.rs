pub mod bind_service_command;
pub mod deprovision_service_instance_command;
pub mod provision_service_instance_command;
pub mod unbind_service_command;
pub mod update_service_instance_command;
