// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C1 control codes in their 7-bit "Fe" form: ESC followed by a byte in `0x40..=0x5F`.

use crate::{EscapeSequence, build_sequence,
            constants::{APC_CODE, CSI_CODE, DCS_CODE, OSC_CODE, PM_CODE, SOS_CODE,
                        SS2_CODE, SS3_CODE, ST_CODE}};

named_sequences! {
    /// ESC N (SS2).
    single_shift_two => build_sequence(SS2_CODE, None, &[]);
    /// ESC O (SS3).
    single_shift_three => build_sequence(SS3_CODE, None, &[]);
    /// ESC P (DCS).
    device_control_string => build_sequence(DCS_CODE, None, &[]);
    /// ESC \ (ST).
    string_terminator => build_sequence(ST_CODE, None, &[]);
    /// ESC ] (OSC).
    operating_system_command => build_sequence(OSC_CODE, None, &[]);
    /// ESC X (SOS).
    start_of_string => build_sequence(SOS_CODE, None, &[]);
    /// ESC ^ (PM).
    privacy_message => build_sequence(PM_CODE, None, &[]);
    /// ESC _ (APC).
    application_program_command => build_sequence(APC_CODE, None, &[]);
}

/// CSI (Control Sequence Introducer): `ESC [` + `;` joined `args` + `subcode`. Almost
/// everything in [`crate::sequences`] is built on this.
#[must_use]
pub fn control_sequence_introducer(subcode: &str, args: &[u16]) -> EscapeSequence {
    build_sequence(CSI_CODE, Some(subcode), args)
}
