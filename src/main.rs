fn main() {
    if let Err(err) = gpipe::run(std::env::args().skip(1).peekable()) {
        err.termination()
    }
}
