use anyhow::Result;
use please::cli::{app, invocation};
use please::{ClientConfig, ColoredOutputter, Runtime};
use std::io::{stdout, IsTerminal};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = app().get_matches();
    let invocation = invocation(&matches)?;

    let mut stdout = stdout();
    let colored = !invocation.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && stdout.is_terminal();
    let mut outputter = ColoredOutputter::new(&mut stdout, colored);

    let mut runtime = Runtime::new(&mut outputter, ClientConfig::default(), &invocation.output_dir)?;
    runtime.run(
        &invocation.request,
        invocation.repetitions,
        invocation.options,
    )?;

    Ok(())
}
