use gamecard::cli::Cli;

fn main() {
    Cli::run();
}
