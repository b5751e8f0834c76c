fn main() {
    wrapgen::cli::run();
}
