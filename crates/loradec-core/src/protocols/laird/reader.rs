/// Safe byte access over a Laird payload.
///
/// Reads return `None` past the end of the payload: in this protocol a
/// missing byte means "no decodable record", never an error (the parser
/// gates every branch on an exact-length check first).
pub struct LairdReader<'a> {
    payload: &'a [u8],
}

impl<'a> LairdReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn read_u8(&self, offset: usize) -> Option<u8> {
        self.payload.get(offset).copied()
    }

    pub fn read_pair(&self, offset: usize) -> Option<[u8; 2]> {
        let bytes = self.payload.get(offset..offset + 2)?;
        Some([bytes[0], bytes[1]])
    }

    pub fn read_quad(&self, offset: usize) -> Option<[u8; 4]> {
        let bytes = self.payload.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
