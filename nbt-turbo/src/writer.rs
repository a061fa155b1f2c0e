use thiserror::Error;

/// Longest name or string payload the u16 length prefix can describe.
pub const MAX_STRING_LEN: usize = 32767;

/// Longest array the i32 length prefix can describe.
pub const MAX_ARRAY_LEN: usize = std::i32::MAX as usize;

/// Tag ids written by [`CompoundWriter`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
	End = 0,
	I16 = 2,
	U8Array = 7,
	String = 8,
	List = 9,
	Compound = 10
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum TagError {
	#[error("tag name too long: {len} bytes (maximum length: {})", MAX_STRING_LEN)]
	NameTooLong { len: usize },
	#[error("string value of tag {name:?} too long: {len} bytes (maximum length: {})", MAX_STRING_LEN)]
	StringTooLong { name: String, len: usize },
	#[error("array {name:?} too long: {len} elements (maximum length: {})", MAX_ARRAY_LEN)]
	ArrayTooLong { name: String, len: usize }
}

pub trait Output {
	fn push(&mut self, value: u8);
	fn extend_from_slice(&mut self, slice: &[u8]);
}

impl<T> Output for &mut T where T: Output {
	fn push(&mut self, value: u8) {
		T::push(self, value)
	}

	fn extend_from_slice(&mut self, slice: &[u8]) {
		T::extend_from_slice(self, slice);
	}
}

impl Output for Vec<u8> {
	fn push(&mut self, value: u8) {
		Vec::push(self, value)
	}

	fn extend_from_slice(&mut self, slice: &[u8]) {
		Vec::extend_from_slice(self, slice)
	}
}

pub struct CompoundWriter<T: Output> {
	out: T
}

impl<T: Output> CompoundWriter<T> {
	/// Begins a new compound tag.
	pub fn start(name: &str, out: T) -> Result<Self, TagError> {
		let mut writer = CompoundWriter { out };

		writer.header(Kind::Compound, name)?;
		Ok(writer)
	}

	/// Writes a complete compound tag, letting `filler` add the children.
	pub fn write<F>(name: &str, out: T, filler: F) -> Result<T, TagError> where F: FnOnce(&mut CompoundWriter<T>) -> Result<(), TagError> {
		let mut writer = CompoundWriter::start(name, out)?;

		filler(&mut writer)?;

		Ok(writer.end())
	}

	/// Ends the compound tag, returning the buffer.
	pub fn end(mut self) -> T {
		self.out.push(Kind::End as u8);
		self.out
	}

	fn header(&mut self, kind: Kind, name: &str) -> Result<(), TagError> {
		if name.len() > MAX_STRING_LEN {
			return Err(TagError::NameTooLong { len: name.len() });
		}

		self.out.push(kind as u8);
		self.out.extend_from_slice(&u16::to_be_bytes(name.len() as u16));
		self.out.extend_from_slice(name.as_bytes());

		Ok(())
	}

	pub fn i16(&mut self, name: &str, value: i16) -> Result<&mut Self, TagError> {
		self.header(Kind::I16, name)?;
		self.out.extend_from_slice(&value.to_be_bytes());

		Ok(self)
	}

	pub fn string(&mut self, name: &str, value: &str) -> Result<&mut Self, TagError> {
		if value.len() > MAX_STRING_LEN {
			return Err(TagError::StringTooLong { name: name.to_owned(), len: value.len() });
		}

		self.header(Kind::String, name)?;
		self.out.extend_from_slice(&u16::to_be_bytes(value.len() as u16));
		self.out.extend_from_slice(value.as_bytes());

		Ok(self)
	}

	fn array_length(&mut self, len: usize) {
		self.out.extend_from_slice(&u32::to_be_bytes(len as u32));
	}

	/// Byte array: u32 big-endian element count, then the raw bytes.
	pub fn u8_array(&mut self, name: &str, value: &[u8]) -> Result<&mut Self, TagError> {
		if value.len() > MAX_ARRAY_LEN {
			return Err(TagError::ArrayTooLong { name: name.to_owned(), len: value.len() });
		}

		self.header(Kind::U8Array, name)?;
		self.array_length(value.len());

		self.out.extend_from_slice(value);

		Ok(self)
	}

	/// A list with no elements that still records its element kind.
	///
	/// Some readers reject an empty list typed as `End`, so the element kind
	/// is written even though nothing follows it.
	pub fn empty_list(&mut self, name: &str, element: Kind) -> Result<&mut Self, TagError> {
		self.header(Kind::List, name)?;

		self.out.push(element as u8);
		self.array_length(0);

		Ok(self)
	}
}
