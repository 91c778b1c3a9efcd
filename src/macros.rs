macro_rules! bytepos {
    ($idx:expr) => {{
        let idx = $idx;
        (idx >> 3, idx & 7)
    }};
}

pub(crate) use bytepos;
