//! ToDo Contract ABI
//!
//! Calldata encoding and return-data decoding for the four contract
//! functions, on top of `alloy-dyn-abi`.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::{keccak256, Selector, U256};

use crate::domain::{ReadError, Task};

pub const GET_TASKS_COUNT: &str = "getTasksCount()";
pub const GET_TASK: &str = "getTask(uint256)";
pub const CREATE_TASK: &str = "createTask(string)";
pub const TOGGLE_COMPLETED: &str = "toggleCompleted(uint256)";

/// First four bytes of the signature's keccak256
pub fn selector(signature: &str) -> Selector {
    Selector::from_slice(&keccak256(signature)[..4])
}

/// Encoded function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calldata(Vec<u8>);

impl Calldata {
    fn new(signature: &str, args: Vec<DynSolValue>) -> Self {
        let mut data = selector(signature).to_vec();
        if !args.is_empty() {
            data.extend(DynSolValue::Tuple(args).abi_encode_params());
        }
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

fn uint(value: u64) -> DynSolValue {
    DynSolValue::Uint(U256::from(value), 256)
}

pub fn get_tasks_count() -> Calldata {
    Calldata::new(GET_TASKS_COUNT, vec![])
}

pub fn get_task(index: u64) -> Calldata {
    Calldata::new(GET_TASK, vec![uint(index)])
}

pub fn create_task(content: &str) -> Calldata {
    Calldata::new(CREATE_TASK, vec![DynSolValue::String(content.to_string())])
}

pub fn toggle_completed(index: u64) -> Calldata {
    Calldata::new(TOGGLE_COMPLETED, vec![uint(index)])
}

/// Decode the `uint256` returned by `getTasksCount()`
pub fn decode_count(return_data: &str) -> Result<u64, ReadError> {
    let bytes = decode_hex(return_data)?;
    let value = DynSolType::Uint(256)
        .abi_decode(&bytes)
        .map_err(|e| ReadError::Decode(e.to_string()))?;
    to_u64(&value)
}

/// Decode the `(string, bool)` returned by `getTask(uint256)`
///
/// Read as `(bytes, uint256)`, which share the wire layout, so that a bool
/// word other than 0 or 1 is an error and the text is decoded lossily.
pub fn decode_task(return_data: &str) -> Result<Task, ReadError> {
    let bytes = decode_hex(return_data)?;
    let decoded = DynSolType::Tuple(vec![DynSolType::Bytes, DynSolType::Uint(256)])
        .abi_decode_params(&bytes)
        .map_err(|e| ReadError::Decode(e.to_string()))?;

    let (content, completed) = match decoded {
        DynSolValue::Tuple(values) => match values.as_slice() {
            [DynSolValue::Bytes(content), flag] => (content.clone(), to_u64(flag)?),
            _ => return Err(ReadError::Decode("getTask returned an unexpected shape".to_string())),
        },
        other => return Err(ReadError::Decode(format!("getTask returned {:?}", other))),
    };
    let completed = match completed {
        0 => false,
        1 => true,
        other => return Err(ReadError::Decode(format!("bool word holds {}", other))),
    };

    Ok(Task {
        content: String::from_utf8_lossy(&content).into_owned(),
        completed,
    })
}

fn decode_hex(return_data: &str) -> Result<Vec<u8>, ReadError> {
    let digits = return_data.strip_prefix("0x").unwrap_or(return_data);
    hex::decode(digits).map_err(|e| ReadError::Decode(e.to_string()))
}

fn to_u64(value: &DynSolValue) -> Result<u64, ReadError> {
    match value {
        DynSolValue::Uint(value, _) => u64::try_from(*value)
            .map_err(|_| ReadError::Decode(format!("uint256 {} exceeds u64", value))),
        other => Err(ReadError::Decode(format!("expected uint256, got {:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left-pad a hex quantity to one ABI word
    fn word(quantity: &str) -> String {
        format!("{:0>64}", quantity)
    }

    /// Right-pad raw bytes (hex) to one ABI word
    fn data_word(bytes: &str) -> String {
        format!("{:0<64}", bytes)
    }

    #[test]
    fn test_selectors() {
        assert_eq!(selector(GET_TASKS_COUNT).to_vec(), vec![0x9f, 0x89, 0x92, 0x73]);
        assert_eq!(selector(GET_TASK).to_vec(), vec![0x1d, 0x65, 0xe7, 0x7e]);
        assert_eq!(selector(CREATE_TASK).to_vec(), vec![0x11, 0x10, 0x02, 0xaa]);
        assert_eq!(selector(TOGGLE_COMPLETED).to_vec(), vec![0x45, 0x5f, 0x50, 0x24]);
    }

    #[test]
    fn test_get_tasks_count_is_bare_selector() {
        assert_eq!(get_tasks_count().to_hex(), "0x9f899273");
    }

    #[test]
    fn test_uint_argument_layout() {
        let expected = format!("0x1d65e77e{}", word("2a"));
        assert_eq!(get_task(42).to_hex(), expected);
        assert_eq!(toggle_completed(1).to_hex(), format!("0x455f5024{}", word("1")));
    }

    #[test]
    fn test_string_argument_layout() {
        let call = create_task("buy milk");
        let expected = format!(
            "0x111002aa{}{}{}",
            word("20"),
            word("8"),
            data_word("627579206d696c6b")
        );
        assert_eq!(call.to_hex(), expected);
        assert_eq!(call.as_bytes().len(), 4 + 3 * 32);
    }

    #[test]
    fn test_string_exactly_one_word_has_no_padding() {
        let content = "a".repeat(32);
        assert_eq!(create_task(&content).as_bytes().len(), 4 + 3 * 32);
        assert_eq!(create_task("").as_bytes().len(), 4 + 2 * 32);
    }

    #[test]
    fn test_decode_count() {
        assert_eq!(decode_count(&format!("0x{}", word("0"))), Ok(0));
        assert_eq!(decode_count(&format!("0x{}", word("3"))), Ok(3));
    }

    #[test]
    fn test_decode_count_rejects_huge_and_short_values() {
        let huge = format!("0x1{}", "0".repeat(63));
        assert!(matches!(decode_count(&huge), Err(ReadError::Decode(_))));
        assert!(matches!(decode_count("0x"), Err(ReadError::Decode(_))));
        assert!(matches!(decode_count("0xnothex"), Err(ReadError::Decode(_))));
    }

    #[test]
    fn test_decode_task() {
        // ("pay rent", true)
        let data = format!(
            "0x{}{}{}{}",
            word("40"),
            word("1"),
            word("8"),
            data_word("7061792072656e74")
        );
        assert_eq!(decode_task(&data), Ok(Task::new("pay rent", true)));
    }

    #[test]
    fn test_decode_task_with_empty_content() {
        let data = format!("0x{}{}{}", word("40"), word("0"), word("0"));
        assert_eq!(decode_task(&data), Ok(Task::new("", false)));
    }

    #[test]
    fn test_decode_task_rejects_bad_bool() {
        let data = format!(
            "0x{}{}{}{}",
            word("40"),
            word("2"),
            word("1"),
            data_word("61")
        );
        assert!(matches!(decode_task(&data), Err(ReadError::Decode(_))));
    }

    #[test]
    fn test_decode_task_keeps_invalid_utf8_lossy() {
        let data = format!("0x{}{}{}{}", word("40"), word("0"), word("2"), data_word("61ff"));
        assert_eq!(decode_task(&data), Ok(Task::new("a\u{fffd}", false)));
    }

    #[test]
    fn test_decode_task_rejects_truncated_string() {
        let data = format!("0x{}{}{}", word("40"), word("0"), word("40"));
        assert!(matches!(decode_task(&data), Err(ReadError::Decode(_))));
    }
}
