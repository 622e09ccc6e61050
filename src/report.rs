use regex::Regex;
use serde::Serialize;

/// Textual marker iccdump prints for mft2 (16-bit) LUT tags. Any occurrence
/// inside the isolated block selects the 16-bit divisor.
pub const LUT16_MARKER: &str = "Lut16";

const TAG_HEADER: &str = r"tag\s+(\d+):\s+sig\s+'(\S+)'";
const INPUT_ENTRIES: &str = r"Input Table entries = (\d+)";
const OUTPUT_ENTRIES: &str = r"Output Table entries = (\d+)";
const INTEGER_TOKEN: &str = r"\b(\d+)\b";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
    pub index: u32,
    pub signature: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

impl BitDepth {
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Maximum sample value for this depth, used as the normalization divisor.
    pub fn divisor(self) -> f64 {
        match self {
            BitDepth::Eight => 255.0,
            BitDepth::Sixteen => 65535.0,
        }
    }
}

/// LUT data recovered from one isolated report block.
///
/// Entry counts are kept as the raw matched text; `values` holds every
/// integer token of the block rescaled to [0, 1]. A block with no integers
/// produces an empty `values`, which is distinct from the block-not-found
/// case (`None` from [`extract_lut`]).
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LutData {
    pub bit_depth: u8,
    pub input_entries: Vec<String>,
    pub output_entries: Vec<String>,
    pub values: Vec<f64>,
}

/// Enumerate every `tag <index>: sig '<signature>'` header in textual order.
///
/// Signatures are not deduplicated; an empty report yields an empty list.
pub fn enumerate_tags(report: &str) -> Vec<TagDescriptor> {
    let Ok(re) = Regex::new(TAG_HEADER) else {
        return Vec::new();
    };
    re.captures_iter(report)
        .filter_map(|cap| {
            let index = cap[1].parse().ok()?;
            Some(TagDescriptor {
                index,
                signature: cap[2].to_string(),
            })
        })
        .collect()
}

/// Isolate the report region belonging to `signature`.
///
/// The region starts at the first line beginning with `tag` that is
/// followed, possibly after other text, by a line containing
/// `sig '<signature>'`, and runs up to the next line starting with `tag`
/// (exclusive) or the end of the report. The signature is escaped before
/// splicing, so metacharacters in it match literally. No region is a
/// normal outcome, not an error.
pub fn isolate_block<'a>(report: &'a str, signature: &str) -> Option<&'a str> {
    let pattern = format!(
        r"(?ms)^(tag .*?sig\s+'{}'[^\n]*\n.*?)(?:^tag|\z)",
        regex::escape(signature)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(report)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Heuristic marker search, not a field parse: `Lut16` anywhere in the
/// block selects 16-bit, otherwise the block is treated as 8-bit.
pub fn infer_bit_depth(block: &str) -> BitDepth {
    if block.contains(LUT16_MARKER) {
        BitDepth::Sixteen
    } else {
        BitDepth::Eight
    }
}

/// `A2B` or `B2A` followed immediately by a digit, case-sensitive.
pub fn is_lut_family(signature: &str) -> bool {
    let rest = signature
        .strip_prefix("A2B")
        .or_else(|| signature.strip_prefix("B2A"));
    rest.and_then(|r| r.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

fn labeled_entries(block: &str, pattern: &str) -> Vec<String> {
    let Ok(re) = Regex::new(pattern) else {
        return Vec::new();
    };
    re.captures_iter(block)
        .map(|cap| cap[1].to_string())
        .collect()
}

fn normalized_values(text: &str, depth: BitDepth) -> Vec<f64> {
    let Ok(re) = Regex::new(INTEGER_TOKEN) else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|cap| cap[1].parse::<u64>().ok())
        .map(|v| v as f64 / depth.divisor())
        .collect()
}

/// Drop tag headers, sig lines and table-size declarations so the integer
/// scan only sees table samples. Opt-in alternative to the unscoped scan,
/// which also re-captures the declared counts as values.
fn scoped_value_text(block: &str) -> String {
    block
        .lines()
        .filter(|line| {
            !line.starts_with("tag")
                && !line.contains("sig '")
                && !line.contains("Table entries =")
        })
        .map(|line| format!("{line}\n"))
        .collect()
}

/// Parse one isolated block into [`LutData`].
///
/// The unscoped scan captures every integer token in the block, including
/// the declared entry counts and any tag index inside the region. `scoped`
/// restricts the scan to table samples instead.
pub fn lut_from_block(block: &str, scoped: bool) -> LutData {
    let depth = infer_bit_depth(block);
    let values = if scoped {
        normalized_values(&scoped_value_text(block), depth)
    } else {
        normalized_values(block, depth)
    };
    LutData {
        bit_depth: depth.bits(),
        input_entries: labeled_entries(block, INPUT_ENTRIES),
        output_entries: labeled_entries(block, OUTPUT_ENTRIES),
        values,
    }
}

/// Full extraction for one signature: block isolation, bit-depth inference,
/// entry-count capture and value normalization. `None` means the report has
/// no region for this signature; downstream output should render that as
/// "no data" rather than an empty table.
pub fn extract_lut(report: &str, signature: &str, scoped: bool) -> Option<LutData> {
    isolate_block(report, signature).map(|block| lut_from_block(block, scoped))
}
