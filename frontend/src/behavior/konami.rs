use std::collections::VecDeque;

pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown",
    "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight",
    "KeyB", "KeyA",
];

/// Sliding window over the most recent key codes.
#[derive(Clone, Debug)]
pub struct KeySequence {
    target: &'static [&'static str],
    buffer: VecDeque<String>,
}

impl KeySequence {
    pub fn new(target: &'static [&'static str]) -> Self {
        Self {
            target,
            buffer: VecDeque::with_capacity(target.len()),
        }
    }

    pub fn konami() -> Self {
        Self::new(&KONAMI_CODE)
    }

    /// Records a key. Returns true when the window matches the target, in
    /// which case the window starts over empty.
    pub fn push(&mut self, code: impl Into<String>) -> bool {
        self.buffer.push_back(code.into());
        if self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }

        let matched = self.buffer.len() == self.target.len()
            && self.buffer.iter().zip(self.target).all(|(got, want)| got == want);
        if matched {
            self.buffer.clear();
        }
        matched
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<'a>(sequence: &mut KeySequence, codes: impl IntoIterator<Item = &'a str>) -> usize {
        codes.into_iter().filter(|code| sequence.push(*code)).count()
    }

    #[test]
    fn exact_sequence_triggers_once() {
        let mut sequence = KeySequence::konami();
        assert_eq!(feed(&mut sequence, KONAMI_CODE), 1);
        assert_eq!(sequence.len(), 0);
    }

    #[test]
    fn any_wrong_code_never_triggers() {
        for position in 0..KONAMI_CODE.len() {
            let mut codes = KONAMI_CODE.to_vec();
            codes[position] = "KeyZ";
            let mut sequence = KeySequence::konami();
            assert_eq!(feed(&mut sequence, codes), 0, "wrong code at {}", position);
        }
    }

    #[test]
    fn back_to_back_sequences_trigger_twice() {
        let mut sequence = KeySequence::konami();
        let codes = KONAMI_CODE.iter().chain(KONAMI_CODE.iter()).copied();
        assert_eq!(feed(&mut sequence, codes), 2);
    }

    #[test]
    fn leading_noise_is_evicted() {
        let mut sequence = KeySequence::konami();
        let codes = ["KeyQ", "Space", "ArrowUp"].into_iter().chain(KONAMI_CODE);
        assert_eq!(feed(&mut sequence, codes), 1);
    }

    #[test]
    fn window_never_exceeds_target_length() {
        let mut sequence = KeySequence::konami();
        for _ in 0..50 {
            sequence.push("KeyX");
            assert!(sequence.len() <= KONAMI_CODE.len());
        }
    }
}
