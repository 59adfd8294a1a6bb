/// A long English sample used by the end-to-end solver tests. Length
/// matters: per-coset chi-square fitting needs on the order of a
/// hundred letters per coset to be stable.
pub const ENGLISH_SAMPLE: &str = "It was a bright cold day in April and the clocks \
were striking thirteen. The quick brown fox jumps over the lazy dog while the band \
played on and the people of the town came out to see what all of the noise was about. \
There is nothing more deceptive than an obvious fact and you should never trust to \
general impressions but concentrate yourself upon details. The world is full of \
obvious things which nobody by any chance ever observes. Education never ends and it \
is a series of lessons with the greatest for the last. When you have eliminated the \
impossible whatever remains however improbable must be the truth. Sing to me of the \
man of twists and turns driven time and again off course once he had plundered the \
hallowed heights of Troy. Many cities of men he saw and learned their minds and many \
pains he suffered heartsick on the open sea fighting to save his life and bring his \
comrades home. It is a truth universally acknowledged that a single man in possession \
of a good fortune must be in want of a wife.";

pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}
