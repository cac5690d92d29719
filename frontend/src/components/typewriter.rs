use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TYPE_MS: u32 = 70;
const DELETE_MS: u32 = 50;
const PAUSE_MS: u32 = 1000;

/// Types each word, holds it, deletes it, moves on. Loops forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    words: &'static [&'static str],
    word: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words,
            word: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn current(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    pub fn text(&self) -> &'static str {
        let word = self.current();
        let end = word
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        &word[..end]
    }

    /// The following state and how long to wait before showing it.
    pub fn next(&self) -> (Self, u32) {
        let mut next = self.clone();
        let len = self.current().chars().count();
        let delay = if self.deleting {
            next.shown = self.shown.saturating_sub(1);
            if next.shown == 0 {
                next.deleting = false;
                next.word = (self.word + 1) % self.words.len().max(1);
            }
            DELETE_MS
        } else if self.shown < len {
            next.shown += 1;
            TYPE_MS
        } else {
            next.deleting = true;
            next.shown = self.shown.saturating_sub(1);
            PAUSE_MS
        };
        (next, delay)
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub words: &'static [&'static str],
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let writer = use_state(|| Typewriter::new(props.words));

    {
        let setter = writer.setter();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let (next, delay) = current.next();
                let timeout = Timeout::new(delay, move || setter.set(next));
                move || drop(timeout)
            },
            (*writer).clone(),
        );
    }

    html! {
        <>
            {writer.text()}
            <span class="typewriter-cursor">{"|"}</span>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "xyz"];

    fn run(mut writer: Typewriter, steps: usize) -> Vec<(String, u32)> {
        let mut out = Vec::new();
        for _ in 0..steps {
            let (next, delay) = writer.next();
            out.push((next.text().to_string(), delay));
            writer = next;
        }
        out
    }

    #[test]
    fn types_pauses_deletes_and_moves_on() {
        let trace = run(Typewriter::new(WORDS), 6);
        let expected: Vec<(String, u32)> = vec![
            ("a", TYPE_MS),
            ("ab", TYPE_MS),
            ("a", PAUSE_MS),
            ("", DELETE_MS),
            ("x", TYPE_MS),
            ("xy", TYPE_MS),
        ]
        .into_iter()
        .map(|(t, d)| (t.to_string(), d))
        .collect();
        assert_eq!(trace, expected);
    }

    #[test]
    fn loops_back_to_the_first_word() {
        let trace = run(Typewriter::new(WORDS), 14);
        // ab takes 4 steps, xyz takes 6; the last one lands back on ab
        assert_eq!(trace[9].0, "");
        assert_eq!(trace[10].0, "a");
        assert_eq!(trace[11].0, "ab");
    }

    #[test]
    fn multibyte_words_slice_on_char_boundaries() {
        let writer = Typewriter::new(&["héllo"]);
        let trace = run(writer, 3);
        assert_eq!(trace[1].0, "hé");
        assert_eq!(trace[2].0, "hél");
    }

    #[test]
    fn no_words_stays_blank() {
        let trace = run(Typewriter::new(&[]), 4);
        assert!(trace.iter().all(|(text, _)| text.is_empty()));
    }
}
