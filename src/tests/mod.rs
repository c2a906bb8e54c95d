pub mod support;

mod message_tests;
