use asmgrade::sanitize;
use std::{env, fs, process::exit};

fn main() {
    let filename = match env::args().nth(1) {
        Some(f) => f,
        None => {
            eprintln!("usage: sanitize <file.asm>");
            exit(1);
        }
    };

    match fs::read_to_string(&filename) {
        Ok(source) => println!("{}", sanitize(&source)),
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            exit(1);
        }
    }
}
