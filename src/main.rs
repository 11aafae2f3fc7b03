// This binary crate is intentionally minimal.
// The formulas live in the library (src/lib.rs and its modules).
// Grade the coursework quiz with:
//   cargo run --example quiz
fn main() {
    println!("nn-formulas: softmax and cross-entropy from first principles.");
    println!("Run `cargo run --example quiz` to grade the coursework quiz.");
}
