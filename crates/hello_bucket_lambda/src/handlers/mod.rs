pub mod put_hello;
