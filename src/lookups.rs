use course_search_core::careers::{
    cip_codes_for_career, enhanced_keywords_for_career, has_career_mapping, CAREER_MAPPINGS,
};
use course_search_core::programs::course_prefixes_for_program;

pub fn print_codes(career: &str) {
    let codes = cip_codes_for_career(career);
    if codes.is_empty() {
        println!("No mapping.");
        return;
    }
    for code in codes {
        println!("{}", code);
    }
}

pub fn print_keywords(career: &str) {
    for keyword in enhanced_keywords_for_career(career) {
        println!("{}", keyword);
    }
}

pub fn print_check(career: &str) {
    println!("{}", has_career_mapping(career));
}

pub fn print_mappings() {
    println!("{:<26} {:<36} KEYWORDS", "CAREER", "CIP CODES");
    for mapping in CAREER_MAPPINGS {
        println!(
            "{:<26} {:<36} {}",
            mapping.career,
            mapping.cip_codes.join(", "),
            mapping.keywords.join(", ")
        );
    }
}

pub fn print_prefixes(program: &str) {
    match course_prefixes_for_program(program) {
        Some(prefixes) => {
            for prefix in prefixes {
                println!("{}", prefix);
            }
        }
        None => println!("No prefixes."),
    }
}
