use nn_formulas::{QuizSet, softmax, cross_entropy};

fn main() -> nn_formulas::Result<()> {
    env_logger::init();

    let quiz = QuizSet::builtin();
    for grade in quiz.grade()? {
        println!("{grade}\n");
    }

    // The same formulas called directly.
    println!("softmax([1, 2, 3]) = {:?}", softmax(&[1.0, 2.0, 3.0])?);
    println!(
        "cross_entropy([1, 0, 1, 1], [0.4, 0.6, 0.9, 0.5]) = {:.10}",
        cross_entropy(&[1.0, 0.0, 1.0, 1.0], &[0.4, 0.6, 0.9, 0.5])?
    );
    Ok(())
}
