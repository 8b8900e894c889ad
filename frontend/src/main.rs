fn main() {
    approvals_frontend::run();
}
