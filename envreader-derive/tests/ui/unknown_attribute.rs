// Unknown keys inside #[env(...)] are rejected
#![allow(dead_code)]
use envreader::FromEnv;

#[derive(FromEnv)]
struct Config {
    #[env(from_file)]
    pub api_key: String,
}

fn main() {}
