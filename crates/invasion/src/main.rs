use invasion::Command;

fn main() {
    env_logger::init();

    let options = match invasion::parse_args(std::env::args().skip(1)) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Help) => {
            println!("{}", invasion::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{}", invasion::USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = invasion::run(options) {
        log::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
