mod app;
mod cli;
mod discovery;
mod execution;
mod fixture;
mod panic_message;
mod runner;
mod stats;

fn main() {
    let failed = app::run();
    if failed {
        std::process::exit(1);
    }
}
