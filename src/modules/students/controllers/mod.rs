pub mod student_controller;
