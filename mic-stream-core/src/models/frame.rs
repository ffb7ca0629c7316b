/// One discrete unit of captured PCM audio.
///
/// A frame always owns an independent copy of its bytes; the capture loop
/// never retains or aliases a frame after delivering it, so mutating the
/// internal read buffer cannot alter frames already handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFrame {
    bytes: Vec<u8>,
}

impl AudioFrame {
    /// Copy `bytes` into a new frame.
    pub fn copied_from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Number of valid PCM bytes in this frame.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the frame, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_an_independent_copy() {
        let mut source = vec![1u8, 2, 3, 4];
        let frame = AudioFrame::copied_from(&source);

        source[0] = 99;

        assert_eq!(frame.bytes(), &[1, 2, 3, 4]);
        assert_eq!(frame.len(), 4);
    }
}
