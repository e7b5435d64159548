use argmap::derive::*;

#[derive(Debug, Default, ArgmapRecord)]
#[argmap(ignore_unknown)]
struct Config {
    source: String,
    max_size: usize,
    verbose: bool,
}

fn main() {
    match Config::argmap_parse() {
        Ok(config) => println!("{config:?}"),
        Err(error) => {
            eprintln!("Bind error: {error}.");
            std::process::exit(1);
        }
    }
}
