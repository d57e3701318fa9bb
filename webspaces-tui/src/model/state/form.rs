//! 表单状态：若干字段 + 当前焦点

/// 字段值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// 普通文本
    Text(String),
    /// 密码（渲染时遮盖）
    Secret(String),
    /// 开关
    Toggle(bool),
}

/// 表单字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
}

impl Field {
    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: FieldValue::Text(String::new()),
        }
    }

    pub fn secret(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: FieldValue::Secret(String::new()),
        }
    }

    pub fn toggle(label: &'static str) -> Self {
        Self {
            label,
            placeholder: "",
            value: FieldValue::Toggle(false),
        }
    }

    /// 是否接受字符输入
    pub fn is_text(&self) -> bool {
        !matches!(self.value, FieldValue::Toggle(_))
    }

    pub fn as_str(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }
}

/// 表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<Field>,
    pub focused: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields, focused: 0 }
    }

    /// 下一个字段（循环）
    pub fn next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    /// 上一个字段（循环）
    pub fn previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn focused_is_text(&self) -> bool {
        self.focused_field().is_some_and(Field::is_text)
    }

    /// 焦点位于最后一个字段
    pub fn on_last(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
                FieldValue::Toggle(_) => {}
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Secret(s) => {
                    s.pop();
                }
                FieldValue::Toggle(_) => {}
            }
        }
    }

    /// 切换当前开关字段
    pub fn toggle(&mut self) {
        if let Some(Field {
            value: FieldValue::Toggle(on),
            ..
        }) = self.fields.get_mut(self.focused)
        {
            *on = !*on;
        }
    }

    pub fn text(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", Field::as_str)
    }

    pub fn flag(&self, index: usize) -> bool {
        matches!(
            self.fields.get(index),
            Some(Field {
                value: FieldValue::Toggle(true),
                ..
            })
        )
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            match &mut field.value {
                FieldValue::Text(s) | FieldValue::Secret(s) => *s = text.into(),
                FieldValue::Toggle(_) => {}
            }
        }
    }

    pub fn set_flag(&mut self, index: usize, on: bool) {
        if let Some(Field {
            value: FieldValue::Toggle(flag),
            ..
        }) = self.fields.get_mut(index)
        {
            *flag = on;
        }
    }

    /// 替换字段（标签相同、类型随数据变化时使用）
    pub fn replace(&mut self, index: usize, field: Field) {
        if let Some(slot) = self.fields.get_mut(index) {
            *slot = field;
        }
    }

    /// 清空所有文本字段
    pub fn clear(&mut self) {
        for index in 0..self.fields.len() {
            self.set_text(index, String::new());
        }
        self.focused = 0;
    }
}
