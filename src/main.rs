fn main() {
    strand::cli::run();
}
