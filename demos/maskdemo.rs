//!
//! Reformats values through a mask, read from stdin.
//!
//! First argument is the mask format, every input line is rendered
//! and stripped. `maskdemo "(000) 000-0000"` and type away.
//!

use anyhow::Error;
use std::env::args;
use std::io::{BufRead, Write, stdin, stdout};
use text_input_mask::{MaskFormat, render_value, strip_value};

fn main() -> Result<(), Error> {
    setup_logging()?;

    let format = args().nth(1).unwrap_or("CCCCCCCCCC".into());
    let fmt = MaskFormat::new(&format);

    println!("mask {:?}, empty {:?}", fmt.format(), fmt.empty_value());

    let mut line = String::new();
    loop {
        print!("> ");
        stdout().flush()?;

        line.clear();
        if stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let value = line.trim_end_matches(['\r', '\n']);

        let display = render_value(value, &fmt);
        println!("display {:?}", display);
        println!("raw     {:?}", strip_value(&display, &fmt));
    }

    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}
