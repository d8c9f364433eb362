fn main() -> Result<(), Box<dyn std::error::Error>> {
    newton_rings::snapshot_controller()
}
