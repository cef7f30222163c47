use serde::{self, Serializer};

pub(crate) fn serialize<S>(address: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // We serialize addresses as hex strings when generating human-readable formats such as YAML,
    if serializer.is_human_readable() {
        serializer.serialize_str(format!("{address:#x}").as_str())
    } else {
        serializer.serialize_u32(*address)
    }
}
