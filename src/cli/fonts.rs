use crate::figlet;

/// List every font the figlet renderer can use, one per line
pub fn run() {
    println!("Available fonts:\n");
    for font in figlet::available_fonts() {
        println!("{}", font);
    }
}
