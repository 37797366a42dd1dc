/// шестнадцатеричный литерал: 0x41, 0x0, -0x20
pub fn hex(value: i64) -> String
{
    match value < 0 {
        true => format!("-{:#x}", value.unsigned_abs()),
        false => format!("{:#x}", value),
    }
}

/// строка таблицы - элементы через запятую, запятая и после последнего
pub fn format_row(row: &[i64]) -> String
{
    let mut output = String::new();

    for &e in row {
        output.push_str(hex(e).as_str());
        output.push(',');
    }

    output
}

/// объявление массива со строками
pub fn format_table(rune_type: &str, name: &str, rows: &[Vec<i64>]) -> String
{
    let mut output = format!("\nstatic const {} {}[] = {{\n", rune_type, name);

    for row in rows {
        output.push_str(format_row(row).as_str());
        output.push('\n');
    }

    output.push_str("};\n");

    output
}
