use argmap::prelude::*;
use argmap::{args_map, BindError, Binder, FieldRegistry, Primitive, ReadOnly};

#[derive(Debug)]
struct Config {
    port: u16,
    debug: bool,
    version: String,
}

impl Bindable for Config {
    fn registry(&mut self) -> Result<FieldRegistry<'_>, BindError> {
        Ok(FieldRegistry::new("Config")
            .field("port", Primitive::new(&mut self.port))
            .field("debug", Primitive::new(&mut self.debug))
            .field("version", ReadOnly::new(&self.version)))
    }
}

fn main() {
    let arguments = match args_map() {
        Ok(arguments) => arguments,
        Err(error) => {
            eprintln!("usage: demo_builder -port PORT [-debug BOOL] ({error})");
            std::process::exit(1);
        }
    };
    let mut config = Config {
        port: 80,
        debug: false,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    match Binder::new().bind(&arguments, &mut config) {
        Ok(()) => println!("{config:?}"),
        Err(error) => {
            eprintln!("Bind error: {error}.");
            std::process::exit(1);
        }
    }
}
