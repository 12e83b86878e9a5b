mod cli;
mod commands;

use cli::{CheckParams, DumpParams, GenerateParams, build_cli};

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        None => commands::generate::run(GenerateParams::default().into()),
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    if let Err(e) = env_logger::try_init_from_env(env) {
        eprintln!("error: could not start logger: {}", e);
        std::process::exit(1);
    }
}
