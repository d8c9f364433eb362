fn main() {
    newton_rings::run_gui();
}
