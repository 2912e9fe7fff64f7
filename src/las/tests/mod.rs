//! Test fixtures for LAS parser testing
//!
//! Sample LAS files shared by the parser tests and, through
//! `crate::las::tests`, by the mapping tests.


/// LAS 2.0 file with a UWI, a unitless curve and a short data block
pub fn sample_las_v2() -> String {
    r#"~VERSION INFORMATION
 VERS.                  2.0 :   CWLS LOG ASCII STANDARD -VERSION 2.0
 WRAP.                  NO  :   ONE LINE PER DEPTH STEP
~WELL INFORMATION
#MNEM.UNIT     DATA                  DESCRIPTION
 STRT.M        1670.0000             :START DEPTH
 STOP.M        1669.7500             :STOP DEPTH
 STEP.M        -0.1250               :STEP
 NULL.         -999.25               :NULL VALUE
 COMP.         ANY OIL COMPANY INC.  :COMPANY
 WELL.         Well-A                :WELL
 FLD .         WILDCAT               :FIELD
 CNTY.         NORWAY                :COUNTRY
 DATE.         13/12/1986            :LOG DATE
 UWI .         42-001-00001          :UNIQUE WELL ID
~CURVE INFORMATION
 DEPT.M                      :  1  DEPTH
 GR  .                       :  2  GAMMA RAY
 DT  .US/M                   :  3  SONIC TRANSIT TIME
~PARAMETER INFORMATION
 BHT .DEGC     35.5000       :  BOTTOM HOLE TEMPERATURE
~A  DEPTH     GR        DT
1670.000   45.125   123.450
1669.875   46.000   124.100
1669.750   44.750   -999.25
"#
    .to_string()
}

/// LAS 1.2 file: well values live in the description slot
pub fn sample_las_v12() -> String {
    r#"~Version Information
 VERS.                 1.20:   CWLS log ASCII Standard -VERSION 1.20
 WRAP.                  NO:   One line per depth step
~Well Information Block
 STRT.M              635.0000:
 STOP.M              400.0000:
 STEP.M             -0.1250:
 NULL.               -999.2500:
 COMP.             COMPANY:   ANY OIL COMPANY LTD.
 WELL.                WELL:   ANY ET AL OIL WELL #12
 UWI .      UNIQUE WELL ID:   100091604920W300
~Curve Information Block
 DEPT.M                 :   1  DEPTH
 RHOB.K/M3              :   2  BULK DENSITY
~A
635.0000  2256.0000
"#
    .to_string()
}

/// Minimal LAS 2.0 file without a UWI and with the given curve lines
pub fn minimal_las(well_name: &str, curve_lines: &[&str]) -> String {
    let mut text = String::from("~V\n VERS. 2.0 : CWLS LOG ASCII STANDARD\n");
    text.push_str("~W\n");
    text.push_str(&format!(" WELL. {well_name} : WELL\n"));
    if !curve_lines.is_empty() {
        text.push_str("~C\n");
        for line in curve_lines {
            text.push_str(line);
            text.push('\n');
        }
    }
    text
}
