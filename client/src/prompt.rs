use common::games::OutputSink;
use std::io::{self, BufRead};

const PLAY_AGAIN_QUESTION: &str = "Do you want to play again? (Y to continue or any other key to exit...)";

/// `true` only for a `y`/`Y` answer. End of input counts as no.
pub fn ask_play_again(output: &mut impl OutputSink, input: &mut impl BufRead) -> io::Result<bool> {
    output.output(PLAY_AGAIN_QUESTION, true);

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
