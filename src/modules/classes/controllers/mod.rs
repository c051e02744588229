pub mod class_controller;
