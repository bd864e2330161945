use crate::error::Error;
use crate::model::{Method, Request};
use crate::runtime::RunOptions;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything one invocation of the binary asks for.
#[derive(Debug)]
pub struct Invocation {
    pub request: Request,
    pub repetitions: usize,
    pub options: RunOptions,
    pub output_dir: PathBuf,
    pub no_color: bool,
}

pub fn app() -> App<'static, 'static> {
    let mut app = App::new("please")
        .version(VERSION)
        .about("Http client")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("LOG")
                .short("l")
                .long("log")
                .global(true)
                .help("create a log file of the http request response"),
        )
        .arg(
            Arg::with_name("GEN_CHART")
                .short("c")
                .long("gen-chart")
                .global(true)
                .help("generate a response time chart and must be called with the --repeat flag (--repeat=n, n>= 2)"),
        )
        .arg(
            Arg::with_name("REPEAT")
                .short("r")
                .long("repeat")
                .takes_value(true)
                .global(true)
                .default_value("1")
                .validator(is_valid_repetitions)
                .help("repeat a request n times"),
        )
        .arg(
            Arg::with_name("OUTPUT_DIR")
                .short("o")
                .long("output-dir")
                .takes_value(true)
                .global(true)
                .default_value(".")
                .help("directory where log files and the chart are written"),
        )
        .arg(
            Arg::with_name("NO_COLOR")
                .long("no-color")
                .global(true)
                .help("disable colored output"),
        );

    for method in Method::ALL {
        app = app.subcommand(verb(method));
    }
    app
}

fn verb(method: Method) -> App<'static, 'static> {
    let (name, about): (&'static str, &'static str) = match method {
        Method::Get => ("get", "Make a GET request.\tE.g: please get https://httpbin.org/get"),
        Method::Post => (
            "post",
            "Make a POST request.\tE.g: please post https://httpbin.org/post foo=bar",
        ),
        Method::Put => (
            "put",
            "Make a PUT request.\tE.g: please put https://httpbin.org/put foo=bar",
        ),
        Method::Patch => (
            "patch",
            "Make a PATCH request.\tE.g: please patch https://httpbin.org/patch foo=bar",
        ),
        Method::Delete => (
            "delete",
            "Make a DELETE request.\tE.g: please delete https://httpbin.org/delete",
        ),
        Method::Head => ("head", "Make a HEAD request.\tE.g: please head https://httpbin.org/"),
        Method::Options => (
            "options",
            "Make a OPTIONS request.\tE.g: please options https://httpbin.org/",
        ),
    };

    SubCommand::with_name(name)
        .about(about)
        .arg(Arg::with_name("URL").required(true).index(1))
        .arg(
            Arg::with_name("PAYLOAD")
                .multiple(true)
                .index(2)
                .help("key=value pairs sent as a JSON object"),
        )
}

fn is_valid_repetitions(val: String) -> Result<(), String> {
    match val.parse::<usize>() {
        Ok(0) => Err(String::from("repetitions must be at least 1")),
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("repetitions is not a valid integer")),
    }
}

/// Turns parsed arguments into an [`Invocation`]. Verbs that send a body need
/// at least one `key=value` argument.
pub fn invocation(matches: &ArgMatches) -> Result<Invocation, Error> {
    let (name, sub_matches) = match matches.subcommand() {
        (name, Some(sub_matches)) => (name, sub_matches),
        _ => return Err(Error::usage("missing request type")),
    };
    let method: Method = name.parse()?;

    let url = sub_matches
        .value_of("URL")
        .ok_or_else(|| Error::usage("too few args"))?;
    let payload: Vec<String> = sub_matches
        .values_of("PAYLOAD")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_default();

    if method.accepts_payload() && payload.is_empty() {
        return Err(Error::usage("too few args"));
    }

    let repetitions = global_value(matches, sub_matches, "REPEAT")
        .unwrap_or("1")
        .parse::<usize>()
        .map_err(|_| Error::usage("repetitions is not a valid integer"))?;

    Ok(Invocation {
        request: Request::new(method, url, payload),
        repetitions,
        options: RunOptions {
            emit_log: global_flag(matches, sub_matches, "LOG"),
            emit_chart: global_flag(matches, sub_matches, "GEN_CHART"),
        },
        output_dir: PathBuf::from(global_value(matches, sub_matches, "OUTPUT_DIR").unwrap_or(".")),
        no_color: global_flag(matches, sub_matches, "NO_COLOR"),
    })
}

// Global arguments may be given before or after the verb. Defaults live on
// both levels, so only an explicit occurrence on the verb wins.
fn global_value<'a>(
    matches: &'a ArgMatches,
    sub_matches: &'a ArgMatches,
    name: &str,
) -> Option<&'a str> {
    if sub_matches.occurrences_of(name) > 0 {
        sub_matches.value_of(name)
    } else {
        matches.value_of(name)
    }
}

fn global_flag(matches: &ArgMatches, sub_matches: &ArgMatches, name: &str) -> bool {
    matches.is_present(name) || sub_matches.is_present(name)
}
