// One animal per polymorphism pattern, one line each.

use polymorphism_patterns::showcase;

fn main() {
    for line in showcase() {
        println!("{line}");
    }
}
