use std::marker::PhantomData;

use serde::{
	de::Error as _,
	ser::{SerializeSeq, SerializeTuple},
	Deserialize, Serialize,
};

use crate::{Discrete, Endpoint, Error, Range, RangeSet};

impl<T: Serialize, D: Discrete<T>> Serialize for Range<T, D> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(self.min())?;
		t.serialize_element(self.max())?;
		t.end()
	}
}

fn invalid<T>(e: Error<T>) -> String {
	match e {
		Error::MissingValue(endpoint) => format!("missing {endpoint} value"),
		Error::InvalidRange { .. } => "invalid range: min is after max".to_owned(),
	}
}

impl<'de, T, D> Deserialize<'de> for Range<T, D>
where
	T: Deserialize<'de>,
	D: Discrete<T> + Default,
{
	fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
	where
		De: serde::Deserializer<'de>,
	{
		struct Visitor<T, D>(PhantomData<(T, D)>);

		impl<'de, T: Deserialize<'de>, D: Discrete<T> + Default> serde::de::Visitor<'de>
			for Visitor<T, D>
		{
			type Value = Range<T, D>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a closed range")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let min = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom(invalid(Error::<T>::MissingValue(Endpoint::Min))))?;
				let max = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom(invalid(Error::<T>::MissingValue(Endpoint::Max))))?;
				Range::new(min, max).map_err(|e| A::Error::custom(invalid(e)))
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}

impl<T: Serialize, D: Discrete<T>> Serialize for RangeSet<T, D> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.range_count()))?;

		for range in self {
			seq.serialize_element(range)?;
		}

		seq.end()
	}
}

/// Sets are normalized when deserialized.
impl<'de, T, D> Deserialize<'de> for RangeSet<T, D>
where
	T: Clone + Deserialize<'de>,
	D: Discrete<T> + Clone + Default,
{
	fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
	where
		De: serde::Deserializer<'de>,
	{
		let ranges = Vec::<Range<T, D>>::deserialize(deserializer)?;
		Ok(RangeSet::of(ranges))
	}
}
