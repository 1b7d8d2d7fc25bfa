fn main() {
    bytevm::term::main()
}
