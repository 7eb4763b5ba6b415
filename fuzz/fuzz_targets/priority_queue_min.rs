#![no_main]

use libfuzzer_sys::fuzz_target;

use waypath::{
    infra::testing::{QueueModel, QueueOp},
    Order,
};

fuzz_target!(|ops: Vec<QueueOp>| {
    let mut model = QueueModel::new(Order::Min);
    model
        .apply_all(ops)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});
