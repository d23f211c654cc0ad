use clap::Parser;
use gbtk::cli::{usage, Cli, Mode};
use gbtk::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let mode = Cli::try_parse().ok().and_then(Cli::into_mode);

    let Some(mode) = mode else {
        print!("{}", usage());
        std::process::exit(1);
    };

    let printer = Printer::new();
    match mode {
        Mode::Create(dir) => {
            let mut prompter = gbtk::prompt::stdin_prompter();
            gbtk::cli::create::run(&dir, &printer, prompter.as_mut())?;
        }
        Mode::Validate(file) => {
            gbtk::cli::validate::run(&file, &printer)?;
        }
    }

    Ok(())
}
