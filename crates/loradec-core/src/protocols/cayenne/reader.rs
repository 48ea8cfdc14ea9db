use super::error::CayenneError;

/// Cursor over a self-describing LPP byte stream.
///
/// Every read advances past the consumed bytes and fails with
/// `Truncated` instead of reading out of range.
pub struct CayenneReader<'a> {
    payload: &'a [u8],
    cursor: usize,
}

impl<'a> CayenneReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload, cursor: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.payload.len()
    }

    pub fn read_u8(&mut self) -> Result<u8, CayenneError> {
        let byte = self
            .payload
            .get(self.cursor)
            .copied()
            .ok_or(CayenneError::Truncated {
                needed: self.cursor + 1,
                actual: self.payload.len(),
            })?;
        self.cursor += 1;
        Ok(byte)
    }

    pub fn take(&mut self, count: usize) -> Result<&'a [u8], CayenneError> {
        let end = self.cursor + count;
        let bytes = self
            .payload
            .get(self.cursor..end)
            .ok_or(CayenneError::Truncated {
                needed: end,
                actual: self.payload.len(),
            })?;
        self.cursor = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::CayenneReader;
    use crate::protocols::cayenne::error::CayenneError;

    #[test]
    fn reads_advance_the_cursor() {
        let mut reader = CayenneReader::new(&[0x01, 0x67, 0x00, 0xE1]);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u8().unwrap(), 0x67);
        assert_eq!(reader.take(2).unwrap(), &[0x00, 0xE1]);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn reading_past_the_end_is_truncation() {
        let mut reader = CayenneReader::new(&[0x01]);
        reader.read_u8().unwrap();
        let err = reader.read_u8().unwrap_err();
        assert!(matches!(err, CayenneError::Truncated { needed: 2, actual: 1 }));
    }

    #[test]
    fn short_take_is_truncation() {
        let mut reader = CayenneReader::new(&[0x01, 0x02]);
        let err = reader.take(3).unwrap_err();
        assert!(matches!(err, CayenneError::Truncated { needed: 3, actual: 2 }));
    }
}
