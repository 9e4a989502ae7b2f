use clap::Parser;

fn main() {
    let cli = mailqr::cli::Cli::parse();
    mailqr::logging::init(cli.verbose);

    if let Err(err) = mailqr::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
