pub mod broker_rest_controller;
