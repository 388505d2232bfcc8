//! Built-in templates
//!
//! The default header and per-function templates. Both always render
//! source that the built-in import normalizer accepts.

/// Name under which the built-in test template is listed
pub const DEFAULT_TEMPLATE_NAME: &str = "default";

/// Standard library packages the built-in test template references
pub const TEMPLATE_IMPORTS: [&str; 2] = ["reflect", "testing"];

/// Package clause and import block of a new test file
pub const DEFAULT_HEADER: &str = r#"package {{ package }}

import (
	"reflect"
	"testing"
{% for spec in imports %}
	{{ ast(spec) }}
{% endfor %}
)
"#;

/// Table-driven test for one function or method
pub const DEFAULT_TEST: &str = r#"

func {{ func.test_name }}(t *testing.T) {
{% if params(func) %}
	type args struct {
{% for param in params(func) %}
		{{ param }}
{% endfor %}
	}

{% endif %}
	tests := []struct {
		name string
{% if func.is_method %}

		init    func(t *testing.T) {{ ast(func.receiver_type) }}
		inspect func(r {{ ast(func.receiver_type) }}, t *testing.T) //inspects receiver after test run
{% endif %}
{% if params(func) %}

		args func(t *testing.T) args
{% endif %}
{% if results(func) %}

{% for result in results(func) %}
		{{ want(result) }}
{% endfor %}
{% endif %}
{% if func.returns_error %}

		wantErr    bool
		inspectErr func(err error, t *testing.T) //use for more precise error evaluation after test
{% endif %}
	}{
{% if comment %}
		//{{ comment }}
{% else %}
		//TODO: Add test cases
{% endif %}
	}

	for _, tt := range tests {
		t.Run(tt.name, func(t *testing.T) {
{% if params(func) %}
			tArgs := tt.args(t)

{% endif %}
{% if func.is_method %}
			receiver := tt.init(t)
			{{ join(func.result_names, ", ") ~ " := " if func.result_names else "" }}receiver.{{ func.name }}({% for name in func.param_names %}{{ ", " if not loop.first else "" }}tArgs.{{ name }}{% endfor %})

			if tt.inspect != nil {
				tt.inspect(receiver, t)
			}
{% else %}
			{{ join(func.result_names, ", ") ~ " := " if func.result_names else "" }}{{ func.name }}({% for name in func.param_names %}{{ ", " if not loop.first else "" }}tArgs.{{ name }}{% endfor %})
{% endif %}
{% for result in func.result_names %}
{% if func.returns_error and loop.last %}

			if (err != nil) != tt.wantErr {
				t.Fatalf("{{ receiver(func) }}{{ func.name }} error = %v, wantErr: %t", err, tt.wantErr)
			}

			if tt.inspectErr != nil {
				tt.inspectErr(err, t)
			}
{% else %}

			if !reflect.DeepEqual({{ result }}, tt.{{ want(result) }}) {
				t.Errorf("{{ receiver(func) }}{{ func.name }} {{ result }} = %v, {{ want(result) }}: %v", {{ result }}, tt.{{ want(result) }})
			}
{% endif %}
{% endfor %}
		})
	}
}
"#;
